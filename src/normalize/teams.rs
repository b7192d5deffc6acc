use tracing::warn;

use super::identity::Registry;
use crate::model::Team;
use crate::parser::{team_display_name, RawRow};

/// Teams keyed by NOC code; the first display name seen for a code wins
#[derive(Debug, Clone, Default)]
pub struct Teams {
    by_noc: Registry<String, String>,
}

impl Teams {
    pub fn team_id(&self, noc: &str) -> Option<i64> {
        self.by_noc.id_of(noc)
    }

    pub fn len(&self) -> usize {
        self.by_noc.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_noc.is_empty()
    }

    pub fn entities(&self) -> Vec<Team> {
        self.by_noc
            .iter()
            .map(|(id, noc, name)| Team {
                id,
                noc_code: noc.clone(),
                display_name: name.clone(),
            })
            .collect()
    }
}

/// Rows without a NOC contribute no team
pub fn extract_teams(rows: &[RawRow]) -> Teams {
    let mut by_noc: Registry<String, String> = Registry::new();
    let mut skipped = 0usize;

    for row in rows {
        let Some(noc) = row.noc.as_deref() else {
            skipped += 1;
            continue;
        };
        if !by_noc.contains(noc) {
            by_noc.insert_first(noc.to_string(), team_display_name(&row.team).to_string());
        }
    }

    if skipped > 0 {
        warn!(skipped, "Rows without a NOC code were ignored for teams");
    }

    Teams { by_noc }
}

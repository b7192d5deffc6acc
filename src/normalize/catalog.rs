use super::identity::Registry;
use crate::parser::RawRow;

/// Distinct names with first-occurrence ids; used for both sports and events
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    names: Registry<String>,
}

impl Catalog {
    pub fn id_of(&self, name: &str) -> Option<i64> {
        self.names.id_of(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, &str)> {
        self.names.iter().map(|(id, name, _)| (id, name.as_str()))
    }
}

fn collect_names<'a>(rows: &'a [RawRow], field: impl Fn(&'a RawRow) -> &'a str) -> Catalog {
    let mut names: Registry<String> = Registry::new();
    for row in rows {
        let name = field(row);
        if !names.contains(name) {
            names.intern(name.to_string());
        }
    }
    Catalog { names }
}

pub fn extract_sports(rows: &[RawRow]) -> Catalog {
    collect_names(rows, |row| row.sport.as_str())
}

pub fn extract_events(rows: &[RawRow]) -> Catalog {
    collect_names(rows, |row| row.event.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::test_rows::row;

    #[test]
    fn test_sport_ids_follow_first_occurrence() {
        let rows = vec![
            row().sport("Judo").event("Judo Men's Lightweight").build(),
            row().sport("Rowing").event("Rowing Men's Coxed Eights").build(),
            row().sport("Judo").event("Judo Men's Heavyweight").build(),
        ];
        let sports = extract_sports(&rows);
        assert_eq!(sports.len(), 2);
        assert_eq!(sports.id_of("Judo"), Some(0));
        assert_eq!(sports.id_of("Rowing"), Some(1));

        let events = extract_events(&rows);
        let names: Vec<_> = events.iter().collect();
        assert_eq!(
            names,
            vec![
                (0, "Judo Men's Lightweight"),
                (1, "Rowing Men's Coxed Eights"),
                (2, "Judo Men's Heavyweight"),
            ]
        );
    }
}

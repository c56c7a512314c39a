/// One day of traffic as reported by the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TrafficRecord {
    /// Calendar date, first 10 characters of the API timestamp
    pub(crate) date: String,
    pub(crate) count: u64,
    pub(crate) uniques: u64,
}

/// Parsed body of a `/traffic/{op}` call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct TrafficResponse {
    pub(crate) total_count: u64,
    pub(crate) total_uniques: u64,
    /// API order, duplicates kept
    pub(crate) records: Vec<TrafficRecord>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct DayCounts {
    pub(crate) count: u64,
    pub(crate) uniques: u64,
}

/// Insertion-ordered date -> counts mapping.
///
/// Inserting a date that is already present replaces its counts in place,
/// so the first occurrence fixes the position and the last one fixes the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct DailyTraffic {
    days: Vec<(String, DayCounts)>,
}

impl DailyTraffic {
    pub(crate) fn insert(&mut self, date: &str, counts: DayCounts) {
        match self.days.iter_mut().find(|(d, _)| d == date) {
            Some((_, existing)) => *existing = counts,
            None => self.days.push((date.to_string(), counts)),
        }
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, DayCounts)> {
        self.days.iter().map(|(d, c)| (d.as_str(), *c))
    }

    pub(crate) fn len(&self) -> usize {
        self.days.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(count: u64, uniques: u64) -> DayCounts {
        DayCounts { count, uniques }
    }

    #[test]
    fn insert_keeps_first_position_and_last_value() {
        let mut daily = DailyTraffic::default();
        daily.insert("2020-01-01", counts(1, 1));
        daily.insert("2020-01-02", counts(2, 2));
        daily.insert("2020-01-01", counts(9, 4));

        let days: Vec<_> = daily.iter().collect();
        assert_eq!(
            days,
            vec![("2020-01-01", counts(9, 4)), ("2020-01-02", counts(2, 2))]
        );
        assert_eq!(daily.len(), 2);
    }

    #[test]
    fn empty_by_default() {
        let daily = DailyTraffic::default();
        assert_eq!(daily.len(), 0);
        assert_eq!(daily.iter().count(), 0);
    }
}

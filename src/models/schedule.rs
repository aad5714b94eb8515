use std::collections::BTreeMap;

use super::TimeOfDay;

/// Расписание одного пользователя: время -> описание задачи.
/// На одно время приходится не больше одной задачи, повторная вставка
/// молча перезаписывает описание.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    tasks: BTreeMap<TimeOfDay, String>,
}

impl Schedule {
    pub fn put(&mut self, time: TimeOfDay, description: String) {
        self.tasks.insert(time, description);
    }

    /// Удаляет задачу, если она была. Возвращает, была ли.
    pub fn remove(&mut self, time: TimeOfDay) -> bool {
        self.tasks.remove(&time).is_some()
    }

    /// Все задачи по возрастанию времени.
    pub fn entries(&self) -> Vec<(TimeOfDay, String)> {
        self.tasks
            .iter()
            .map(|(time, description)| (*time, description.clone()))
            .collect()
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    #[test]
    fn put_then_entries_contains_the_pair() {
        let mut schedule = Schedule::default();
        schedule.put(t("12:30"), "Обед".to_string());
        assert_eq!(schedule.entries(), vec![(t("12:30"), "Обед".to_string())]);
    }

    #[test]
    fn put_at_the_same_time_overwrites() {
        let mut schedule = Schedule::default();
        schedule.put(t("12:30"), "Обед".to_string());
        schedule.put(t("12:30"), "Созвон".to_string());
        assert_eq!(schedule.entries(), vec![(t("12:30"), "Созвон".to_string())]);
    }

    #[test]
    fn remove_absent_returns_false_and_keeps_store() {
        let mut schedule = Schedule::default();
        schedule.put(t("09:00"), "Зарядка".to_string());
        assert!(!schedule.remove(t("10:00")));
        assert_eq!(schedule.entries(), vec![(t("09:00"), "Зарядка".to_string())]);
    }

    #[test]
    fn remove_present_returns_true_and_removes_exactly_that_entry() {
        let mut schedule = Schedule::default();
        schedule.put(t("09:00"), "Зарядка".to_string());
        schedule.put(t("10:00"), "Встреча".to_string());
        assert!(schedule.remove(t("09:00")));
        assert_eq!(schedule.entries(), vec![(t("10:00"), "Встреча".to_string())]);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut schedule = Schedule::default();
        schedule.clear();
        assert!(schedule.entries().is_empty());

        schedule.put(t("09:00"), "Зарядка".to_string());
        schedule.clear();
        schedule.clear();
        assert!(schedule.entries().is_empty());
    }

    #[test]
    fn entries_are_sorted_chronologically() {
        let mut schedule = Schedule::default();
        schedule.put(t("10:00"), "B".to_string());
        schedule.put(t("9:05"), "A".to_string());
        schedule.put(t("23:59"), "C".to_string());
        let times: Vec<String> = schedule
            .entries()
            .into_iter()
            .map(|(time, _)| time.to_string())
            .collect();
        assert_eq!(times, vec!["09:05", "10:00", "23:59"]);
    }
}

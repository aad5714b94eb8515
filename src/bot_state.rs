use std::collections::HashMap;
use std::sync::Arc;

use teloxide::types::ChatId;
use tokio::sync::RwLock;

use crate::models::{Schedule, Session, TimeOfDay};

type ScheduleMap = Arc<RwLock<HashMap<ChatId, Schedule>>>;
type SessionMap = Arc<RwLock<HashMap<ChatId, Session>>>;

/// Общее состояние бота: расписания пользователей и их активные диалоги.
/// Создаётся один раз в main и передаётся обработчикам через dptree.
#[derive(Clone, Default)]
pub struct BotState {
    schedules: ScheduleMap,
    sessions: SessionMap,
}

impl BotState {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn put_task(&self, chat_id: ChatId, time: TimeOfDay, description: String) {
        let mut schedules = self.schedules.write().await;
        schedules.entry(chat_id).or_default().put(time, description);
        log::debug!("💾 Task saved for user {} at {}", chat_id, time);
    }

    pub async fn remove_task(&self, chat_id: ChatId, time: TimeOfDay) -> bool {
        let mut schedules = self.schedules.write().await;
        let removed = schedules
            .get_mut(&chat_id)
            .map(|schedule| schedule.remove(time))
            .unwrap_or(false);
        if removed {
            log::debug!("🗑 Task removed for user {} at {}", chat_id, time);
        }
        removed
    }

    /// Задачи пользователя по возрастанию времени.
    pub async fn tasks(&self, chat_id: ChatId) -> Vec<(TimeOfDay, String)> {
        let schedules = self.schedules.read().await;
        schedules
            .get(&chat_id)
            .map(Schedule::entries)
            .unwrap_or_default()
    }

    pub async fn clear_tasks(&self, chat_id: ChatId) {
        let mut schedules = self.schedules.write().await;
        if let Some(schedule) = schedules.get_mut(&chat_id) {
            schedule.clear();
        }
        log::debug!("🧹 Schedule cleared for user {}", chat_id);
    }

    pub async fn session(&self, chat_id: ChatId) -> Option<Session> {
        let sessions = self.sessions.read().await;
        sessions.get(&chat_id).cloned()
    }

    pub async fn set_session(&self, chat_id: ChatId, session: Session) {
        let mut sessions = self.sessions.write().await;
        if let Some(previous) = sessions.insert(chat_id, session) {
            log::debug!("🔄 Dialogue replaced for user {}, was {:?}", chat_id, previous);
        }
    }

    pub async fn clear_session(&self, chat_id: ChatId) {
        let mut sessions = self.sessions.write().await;
        sessions.remove(&chat_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    const ALICE: ChatId = ChatId(1);
    const BOB: ChatId = ChatId(2);

    #[tokio::test]
    async fn schedules_are_isolated_per_user() {
        let state = BotState::new();
        state.put_task(ALICE, t("09:00"), "Зарядка".to_string()).await;
        state.put_task(BOB, t("10:00"), "Встреча".to_string()).await;

        assert_eq!(state.tasks(ALICE).await, vec![(t("09:00"), "Зарядка".to_string())]);
        assert_eq!(state.tasks(BOB).await, vec![(t("10:00"), "Встреча".to_string())]);

        state.clear_tasks(ALICE).await;
        assert!(state.tasks(ALICE).await.is_empty());
        assert_eq!(state.tasks(BOB).await.len(), 1);
    }

    #[tokio::test]
    async fn remove_task_reports_presence() {
        let state = BotState::new();
        assert!(!state.remove_task(ALICE, t("09:00")).await);

        state.put_task(ALICE, t("09:00"), "Зарядка".to_string()).await;
        assert!(state.remove_task(ALICE, t("09:00")).await);
        assert!(!state.remove_task(ALICE, t("09:00")).await);
    }

    #[tokio::test]
    async fn clear_tasks_for_unknown_user_is_a_noop() {
        let state = BotState::new();
        state.clear_tasks(ALICE).await;
        assert!(state.tasks(ALICE).await.is_empty());
    }

    #[tokio::test]
    async fn session_lifecycle() {
        let state = BotState::new();
        assert_eq!(state.session(ALICE).await, None);

        state.set_session(ALICE, Session::AddAwaitingInput).await;
        assert_eq!(state.session(ALICE).await, Some(Session::AddAwaitingInput));

        // Новый сценарий заменяет старый
        state.set_session(ALICE, Session::DeleteAwaitingTime).await;
        assert_eq!(state.session(ALICE).await, Some(Session::DeleteAwaitingTime));

        state.clear_session(ALICE).await;
        assert_eq!(state.session(ALICE).await, None);
    }
}

use super::TimeOfDay;

/// Состояние многошагового диалога пользователя. У пользователя не бывает
/// больше одного активного диалога; запуск нового сценария с кнопки меню
/// заменяет предыдущее состояние целиком.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    /// Добавление: ждём строку "ЧЧ:ММ Задача".
    AddAwaitingInput,
    /// Удаление: ждём время задачи.
    DeleteAwaitingTime,
    /// Редактирование: ждём номер задачи из показанного списка.
    EditAwaitingChoice,
    /// Редактирование: ждём новое время выбранной задачи.
    EditAwaitingTime { original: TimeOfDay },
    /// Редактирование: ждём новое описание.
    EditAwaitingDescription {
        original: TimeOfDay,
        new_time: TimeOfDay,
    },
}

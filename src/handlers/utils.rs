use teloxide::types::{KeyboardButton, KeyboardMarkup, ReplyMarkup};

/// Главное меню
pub fn main_menu_keyboard() -> ReplyMarkup {
    ReplyMarkup::Keyboard(
        KeyboardMarkup::new(vec![
            vec![
                KeyboardButton::new("Добавить задачу"),
                KeyboardButton::new("Удалить задачу"),
            ],
            vec![
                KeyboardButton::new("Редактировать задачу"),
                KeyboardButton::new("Показать расписание"),
            ],
            vec![
                KeyboardButton::new("Очистить всё"),
                KeyboardButton::new("Помощь"),
            ],
        ])
        .resize_keyboard(),
    )
}

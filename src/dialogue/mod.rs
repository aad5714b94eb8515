use teloxide::types::ChatId;

use crate::bot_state::BotState;
use crate::models::{is_valid_time, Session, TimeOfDay};


const ADD_PROMPT: &str = "Введите время и задачу в формате: ЧЧ:ММ Задача\nНапример: 12:30 Обед";

/// Ответ ядра диалога: текст и нужно ли прикладывать главное меню.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub show_menu: bool,
}

impl Reply {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            show_menu: false,
        }
    }

    fn with_menu(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            show_menu: true,
        }
    }
}

/// Точка входа ядра: кнопки меню разбираются первыми и имеют приоритет
/// над активным диалогом, остальной текст продолжает диалог, если он есть.
pub async fn respond(state: &BotState, chat_id: ChatId, text: &str) -> Reply {
    if let Some(reply) = dispatch_menu(state, chat_id, text).await {
        return reply;
    }
    match state.session(chat_id).await {
        Some(session) => advance(state, chat_id, session, text).await,
        None => Reply::with_menu("Используйте кнопки для управления"),
    }
}

pub fn help_text() -> &'static str {
    "📋 Справка:\n\
     1. Добавить задачу - введите время и задачу\n\
     2. Удалить задачу - введите время задачи\n\
     3. Редактировать задачу - изменить существующую задачу\n\
     4. Показать расписание - все текущие задачи\n\
     5. Очистить всё - удалить все задачи\n\
     Формат времени: ЧЧ:ММ (например 12:30)"
}

async fn dispatch_menu(state: &BotState, chat_id: ChatId, text: &str) -> Option<Reply> {
    let reply = match text {
        "Добавить задачу" => {
            state.set_session(chat_id, Session::AddAwaitingInput).await;
            Reply::text(ADD_PROMPT)
        }
        "Удалить задачу" => {
            state.set_session(chat_id, Session::DeleteAwaitingTime).await;
            Reply::text("Введите время задачи для удаления в формате ЧЧ:ММ\nНапример: 12:30")
        }
        "Редактировать задачу" => {
            let tasks = state.tasks(chat_id).await;
            if tasks.is_empty() {
                state.clear_session(chat_id).await;
                Reply::with_menu("Нет задач для редактирования")
            } else {
                state.set_session(chat_id, Session::EditAwaitingChoice).await;
                Reply::text(edit_choice_prompt(&tasks))
            }
        }
        "Показать расписание" => {
            state.clear_session(chat_id).await;
            Reply::with_menu(render_schedule(&state.tasks(chat_id).await))
        }
        "Очистить всё" => {
            state.clear_session(chat_id).await;
            state.clear_tasks(chat_id).await;
            Reply::with_menu("🧹 Расписание очищено!")
        }
        "Помощь" => {
            state.clear_session(chat_id).await;
            Reply::text(help_text())
        }
        _ => return None,
    };
    Some(reply)
}

async fn advance(state: &BotState, chat_id: ChatId, session: Session, text: &str) -> Reply {
    match session {
        Session::AddAwaitingInput => match parse_task_input(text) {
            Some((time, description)) => {
                state.put_task(chat_id, time, description.clone()).await;
                state.clear_session(chat_id).await;
                Reply::with_menu(format!("✅ Добавлено: {} - {}", time, description))
            }
            None => Reply::text(format!("Неверный формат. {}", ADD_PROMPT)),
        },
        Session::DeleteAwaitingTime => match text.parse::<TimeOfDay>() {
            Ok(time) => {
                let removed = state.remove_task(chat_id, time).await;
                state.clear_session(chat_id).await;
                if removed {
                    Reply::with_menu(format!("❌ Удалено: {}", time))
                } else {
                    Reply::with_menu("⚠️ Задача не найдена!")
                }
            }
            Err(_) => {
                Reply::text("Неверный формат времени. Введите в формате ЧЧ:ММ\nНапример: 12:30")
            }
        },
        Session::EditAwaitingChoice => {
            let tasks = state.tasks(chat_id).await;
            match text.trim().parse::<i64>() {
                Ok(number) if number >= 1 && number <= tasks.len() as i64 => {
                    let original = tasks[number as usize - 1].0;
                    state
                        .set_session(chat_id, Session::EditAwaitingTime { original })
                        .await;
                    Reply::text("Введите новое время (ЧЧ:ММ):")
                }
                Ok(_) => Reply::text("Неверный номер задачи, попробуйте снова:"),
                Err(_) => Reply::text("Введите номер задачи цифрой:"),
            }
        }
        Session::EditAwaitingTime { original } => match text.parse::<TimeOfDay>() {
            Ok(new_time) => {
                state
                    .set_session(chat_id, Session::EditAwaitingDescription { original, new_time })
                    .await;
                Reply::text("Введите новое описание задачи:")
            }
            Err(_) => Reply::text("Неверный формат времени. Введите в формате ЧЧ:ММ:"),
        },
        Session::EditAwaitingDescription { original, new_time } => {
            state.remove_task(chat_id, original).await;
            state.put_task(chat_id, new_time, text.to_string()).await;
            state.clear_session(chat_id).await;
            Reply::with_menu(format!("✅ Задача обновлена: {} - {}", new_time, text))
        }
    }
}

/// Разбор строки "ЧЧ:ММ Задача": валидное время, пробел, непустое описание.
fn parse_task_input(text: &str) -> Option<(TimeOfDay, String)> {
    let (time, description) = text.split_once(' ')?;
    if !is_valid_time(time) || description.is_empty() {
        return None;
    }
    Some((time.parse().ok()?, description.to_string()))
}

fn edit_choice_prompt(tasks: &[(TimeOfDay, String)]) -> String {
    let mut prompt = String::from("Выберите задачу для редактирования:\n");
    for (index, (time, description)) in tasks.iter().enumerate() {
        prompt.push_str(&format!("{}. {} - {}\n", index + 1, time, description));
    }
    prompt.push_str("\nВведите номер задачи:");
    prompt
}

fn render_schedule(tasks: &[(TimeOfDay, String)]) -> String {
    if tasks.is_empty() {
        return "📭 Расписание пусто!".to_string();
    }
    let lines: Vec<String> = tasks
        .iter()
        .map(|(time, description)| format!("⏰ {} - {}", time, description))
        .collect();
    format!("📅 Ваше расписание:\n{}", lines.join("\n"))
}

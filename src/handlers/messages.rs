use teloxide::prelude::*;
use std::error::Error;

use crate::bot_state::BotState;
use crate::dialogue;
use crate::handlers::utils::main_menu_keyboard;

pub async fn message_handler(
    bot: Bot,
    msg: Message,
    state: BotState,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    if let Some(text) = msg.text() {
        // Пропускаем команды - они уже обработаны в command_handler
        if text.starts_with('/') {
            return Ok(());
        }

        let reply = dialogue::respond(&state, msg.chat.id, text).await;

        let mut request = bot.send_message(msg.chat.id, reply.text);
        if reply.show_menu {
            request = request.reply_markup(main_menu_keyboard());
        }
        request.await?;
    } else {
        // Стикеры, фото и прочее расписанием не управляют
        bot.send_message(msg.chat.id, "Используйте кнопки для управления")
            .reply_markup(main_menu_keyboard())
            .await?;
    }
    Ok(())
}

use teloxide::prelude::*;
use std::error::Error;

use crate::dialogue;
use crate::handlers::utils::main_menu_keyboard;

use crate::Command;

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    match cmd {
        Command::Start => handle_start(bot, msg).await?,
        Command::Help => handle_help(bot, msg).await?,
    }
    Ok(())
}

async fn handle_start(bot: Bot, msg: Message) -> Result<(), Box<dyn Error + Send + Sync>> {
    bot.send_message(msg.chat.id, "⏰ Бот-планировщик\nВыберите действие:")
        .reply_markup(main_menu_keyboard())
        .await?;

    Ok(())
}

async fn handle_help(bot: Bot, msg: Message) -> Result<(), Box<dyn Error + Send + Sync>> {
    bot.send_message(msg.chat.id, dialogue::help_text()).await?;

    Ok(())
}

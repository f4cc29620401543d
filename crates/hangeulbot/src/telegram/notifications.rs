use hangeulcore::AdminRecord;
use teloxide::prelude::*;
use teloxide::types::{FileId, InputFile};

/// Forwards a premium payment check to the administrator.
///
/// Sends the sender summary first, then the submitted photo with its original
/// caption. Best effort: failures are logged and never reach the user.
///
/// # Arguments
///
/// * `bot` - Bot instance used to send messages
/// * `admin` - Chat of the administrator; `ChatId(0)` disables forwarding
/// * `record` - The submitted check
pub async fn notify_admin_premium(bot: &Bot, admin: ChatId, record: &AdminRecord) {
    if admin.0 == 0 {
        log::warn!(
            "ADMIN_ID is not set, premium check from user {} was not forwarded",
            record.sender.id
        );
        return;
    }

    if let Err(e) = bot.send_message(admin, record.summary()).await {
        log::error!("Failed to send premium summary to admin {}: {}", admin, e);
    }

    let photo = InputFile::file_id(FileId(record.image.0.clone()));
    if let Err(e) = bot.send_photo(admin, photo).caption(record.caption.clone()).await {
        log::error!("Failed to forward premium check photo to admin {}: {}", admin, e);
    }
}

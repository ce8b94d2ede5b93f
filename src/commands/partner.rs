use crate::app::{PartnerCreateReq, PartnerDto, PartnerUpdateReq};
use crate::error::AppError;
use crate::handlers::{create_partner, get_partners, update_partner};
use crate::infra::DbPool;
use crate::notice::{Locale, Notice, NoticeKind};
use tauri::{AppHandle, State};
use tauri_plugin_dialog::{DialogExt, MessageDialogKind};

fn show_notice(app: &AppHandle, notice: &Notice) {
    let kind = match notice.kind {
        NoticeKind::Info => MessageDialogKind::Info,
        NoticeKind::Error => MessageDialogKind::Error,
    };
    app.dialog()
        .message(notice.message.clone())
        .title(notice.title.clone())
        .kind(kind)
        .show(|_| {});
}

#[tauri::command]
pub fn cmd_get_partners(pool: State<DbPool>) -> Result<Vec<PartnerDto>, AppError> {
    get_partners(&pool)
}

#[tauri::command]
pub fn cmd_create_partner(
    app: AppHandle,
    pool: State<DbPool>,
    locale: State<Locale>,
    req: PartnerCreateReq,
) -> Notice {
    let notice = create_partner(&pool, req, *locale);
    show_notice(&app, &notice);
    notice
}

#[tauri::command]
pub fn cmd_update_partner(
    app: AppHandle,
    pool: State<DbPool>,
    locale: State<Locale>,
    req: PartnerUpdateReq,
) -> Notice {
    let notice = update_partner(&pool, req, *locale);
    show_notice(&app, &notice);
    notice
}

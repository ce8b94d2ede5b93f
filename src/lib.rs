pub mod app;
#[cfg(feature = "desktop")]
mod commands;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod infra;
pub mod notice;

use notice::Locale;
use std::path::PathBuf;

/// Database file name inside the app data directory.
pub const DB_FILE_NAME: &str = "partners.db";

/// Language of user-facing notices.
pub const UI_LOCALE: Locale = Locale::Ru;

/// Fallback when the shell cannot resolve its own data dir.
pub fn app_data_dir() -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("com.nickdu.partnerdesk")
}

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use infra::{init_db, DbPool};
    use tauri::Manager;

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            if cfg!(debug_assertions) {
                app.handle().plugin(
                    tauri_plugin_log::Builder::default()
                        .level(log::LevelFilter::Info)
                        .build(),
                )?;
            }

            let data_dir = app
                .handle()
                .path()
                .app_data_dir()
                .unwrap_or_else(|_| app_data_dir());
            let db_path = data_dir.join(DB_FILE_NAME);
            log::info!("DB path: {:?}", db_path);

            let pool = init_db(&db_path).map_err(|e| {
                log::error!("Failed to initialize application: {}", e);
                e
            })?;
            app.manage(pool);
            app.manage(UI_LOCALE);

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::partner::cmd_get_partners,
            commands::partner::cmd_create_partner,
            commands::partner::cmd_update_partner,
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app, event| {
            if let tauri::RunEvent::Exit = event {
                if let Some(pool) = app.try_state::<DbPool>() {
                    if let Err(e) = pool.close() {
                        log::error!("DB close failed: {}", e);
                    }
                }
            }
        });
}

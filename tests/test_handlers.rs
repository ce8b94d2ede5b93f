//! UI-facing operations: notices and fetch failure mapping

use app_lib::app::{partner_list, PartnerCreateReq, PartnerUpdateReq};
use app_lib::handlers::{create_partner, get_partners, update_partner};
use app_lib::infra::db::init_test_db;
use app_lib::notice::{Locale, NoticeKind};

fn make_create_req(name: &str) -> PartnerCreateReq {
    PartnerCreateReq {
        organization_type: "ОАО".to_string(),
        name: name.to_string(),
        ceo: "Сидоров".to_string(),
        email: "info@example.com".to_string(),
        phone: "123".to_string(),
        address: "Пермь".to_string(),
        rating: 3,
    }
}

fn make_update_req(id: i64, name: &str) -> PartnerUpdateReq {
    PartnerUpdateReq {
        id,
        organization_type: "ООО".to_string(),
        name: name.to_string(),
        ceo: "Сидоров".to_string(),
        email: "info@example.com".to_string(),
        phone: "123".to_string(),
        address: "Пермь".to_string(),
        rating: 4,
    }
}

#[test]
fn get_partners_empty() {
    let pool = init_test_db();
    assert!(get_partners(&pool).unwrap().is_empty());
}

#[test]
fn get_partners_failure_is_generic() {
    let pool = init_test_db();
    pool.close().unwrap();
    let err = get_partners(&pool).unwrap_err();
    assert_eq!(err.code(), "FETCH_FAILED");
    assert_eq!(err.to_string(), "Failed to fetch partners");
}

#[test]
fn create_partner_success_notice() {
    let pool = init_test_db();
    let notice = create_partner(&pool, make_create_req("Новый"), Locale::Ru);
    assert_eq!(notice.kind, NoticeKind::Info);
    assert_eq!(notice.message, "Успех! Партнер создан");
    assert_eq!(get_partners(&pool).unwrap().len(), 1);
}

#[test]
fn create_partner_duplicate_shows_name_message_and_inserts_nothing() {
    let pool = init_test_db();
    create_partner(&pool, make_create_req("Копия"), Locale::Ru);
    let notice = create_partner(&pool, make_create_req("Копия"), Locale::Ru);
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.title, "Ошибка");
    assert_eq!(notice.message, "Партнер с таким именем уже существует");
    assert_eq!(partner_list(&pool).unwrap().len(), 1);
}

#[test]
fn create_partner_other_failure_is_generic() {
    let pool = init_test_db();
    pool.close().unwrap();
    let notice = create_partner(&pool, make_create_req("Late"), Locale::En);
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.message, "Failed to create partner");
}

#[test]
fn update_partner_success_notice() {
    let pool = init_test_db();
    create_partner(&pool, make_create_req("Before"), Locale::Ru);
    let id = get_partners(&pool).unwrap()[0].id;
    let notice = update_partner(&pool, make_update_req(id, "After"), Locale::Ru);
    assert_eq!(notice.message, "Успех! Данные обновлены");
    assert_eq!(get_partners(&pool).unwrap()[0].name, "After");
}

#[test]
fn update_partner_duplicate_name_notice() {
    let pool = init_test_db();
    create_partner(&pool, make_create_req("First"), Locale::En);
    create_partner(&pool, make_create_req("Second"), Locale::En);
    let second = get_partners(&pool).unwrap()[1].id;
    let notice = update_partner(&pool, make_update_req(second, "First"), Locale::En);
    assert_eq!(notice.message, "A partner with this name already exists");
}

#[test]
fn update_partner_unknown_id_is_silent() {
    let pool = init_test_db();
    create_partner(&pool, make_create_req("Existing"), Locale::Ru);
    let before = get_partners(&pool).unwrap();

    let notice = update_partner(&pool, make_update_req(404, "Nobody"), Locale::Ru);
    assert_eq!(notice.kind, NoticeKind::Info);
    assert_eq!(notice.message, "Успех! Данные обновлены");
    assert_eq!(get_partners(&pool).unwrap(), before);
}

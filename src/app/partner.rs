//! Partner use cases.

use super::queries::Query;
use crate::error::AppError;
use crate::infra::get_connection;
use crate::infra::DbPool;
use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct PartnerCreateReq {
    #[serde(rename = "type")]
    pub organization_type: String,
    pub name: String,
    pub ceo: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub rating: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PartnerUpdateReq {
    pub id: i64,
    #[serde(rename = "type")]
    pub organization_type: String,
    pub name: String,
    pub ceo: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub rating: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartnerDto {
    pub id: i64,
    pub organization_type: String,
    pub name: String,
    pub ceo: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub taxpayer_id: Option<String>,
    pub rating: i64,
    /// Sum of all sale quantities; 0 when the partner has no sales.
    pub total_quantity: i64,
    pub discount: i64,
}

fn map_partner(row: &Row<'_>) -> rusqlite::Result<PartnerDto> {
    Ok(PartnerDto {
        id: row.get(0)?,
        organization_type: row.get(1)?,
        name: row.get(2)?,
        ceo: row.get(3)?,
        email: row.get(4)?,
        phone: row.get(5)?,
        address: row.get(6)?,
        taxpayer_id: row.get(7)?,
        rating: row.get(8)?,
        total_quantity: row.get(9)?,
        discount: row.get(10)?,
    })
}

fn fetch_partner(conn: &Connection, id: i64) -> Result<PartnerDto, AppError> {
    conn.query_row(Query::GetPartner.sql(), [id], map_partner)
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => AppError::NotFound(format!("partner {}", id)),
            other => AppError::from(other),
        })
}

pub fn partner_list(pool: &DbPool) -> Result<Vec<PartnerDto>, AppError> {
    let conn = get_connection(pool)?;
    let mut stmt = conn.prepare(Query::ListPartners.sql())?;
    let rows = stmt.query_map([], map_partner)?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn partner_get(pool: &DbPool, id: i64) -> Result<PartnerDto, AppError> {
    let conn = get_connection(pool)?;
    fetch_partner(&conn, id)
}

/// Insert a partner; the id is assigned by the database.
pub fn partner_create(pool: &DbPool, req: PartnerCreateReq) -> Result<PartnerDto, AppError> {
    let conn = get_connection(pool)?;
    conn.execute(
        Query::CreatePartner.sql(),
        params![
            req.organization_type,
            req.name,
            req.ceo,
            req.email,
            req.phone,
            req.address,
            req.rating
        ],
    )?;
    let id = conn.last_insert_rowid();
    log::info!("Partner {} created: {}", id, req.name);
    fetch_partner(&conn, id)
}

/// Overwrite all mutable fields of one partner. An unknown id changes nothing and
/// returns `Ok(None)`.
pub fn partner_update(
    pool: &DbPool,
    req: PartnerUpdateReq,
) -> Result<Option<PartnerDto>, AppError> {
    let conn = get_connection(pool)?;
    let changed = conn.execute(
        Query::UpdatePartner.sql(),
        params![
            req.name,
            req.organization_type,
            req.ceo,
            req.email,
            req.phone,
            req.address,
            req.rating,
            req.id
        ],
    )?;
    if changed == 0 {
        log::warn!("Update matched no partner with id {}", req.id);
        return Ok(None);
    }
    log::info!("Partner {} updated", req.id);
    fetch_partner(&conn, req.id).map(Some)
}

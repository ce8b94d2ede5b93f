//! Fixed SQL catalog for partner operations.

/// Partner columns plus the derived sales aggregate and discount tier.
/// Callers append an optional WHERE and the GROUP BY over every partner column.
macro_rules! select_partner_with_discount {
    () => {
        "SELECT p.id, p.organization_type, p.name, p.ceo, p.email, p.phone, p.address, p.taxpayer_id, p.rating, \
         COALESCE(SUM(s.quantity), 0) AS total_quantity, \
         CASE WHEN SUM(s.quantity) > 300000 THEN 15 \
              WHEN SUM(s.quantity) > 50000 THEN 10 \
              WHEN SUM(s.quantity) > 10000 THEN 5 \
              ELSE 0 \
         END AS discount \
         FROM partners AS p \
         LEFT JOIN sales AS s ON p.id = s.partner_id"
    };
}

macro_rules! group_by_partner {
    () => {
        " GROUP BY p.id, p.organization_type, p.name, p.ceo, p.email, p.phone, p.address, p.taxpayer_id, p.rating"
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    ListPartners,
    GetPartner,
    CreatePartner,
    UpdatePartner,
}

impl Query {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ListPartners => "GET_PARTNERS",
            Self::GetPartner => "GET_PARTNER",
            Self::CreatePartner => "CREATE_PARTNER",
            Self::UpdatePartner => "UPDATE_PARTNER",
        }
    }

    pub fn sql(&self) -> &'static str {
        match self {
            Self::ListPartners => concat!(
                select_partner_with_discount!(),
                group_by_partner!(),
                " ORDER BY p.id"
            ),
            Self::GetPartner => concat!(
                select_partner_with_discount!(),
                " WHERE p.id = ?1",
                group_by_partner!()
            ),
            // ?1..?7: organization_type, name, ceo, email, phone, address, rating
            Self::CreatePartner => {
                "INSERT INTO partners (organization_type, name, ceo, email, phone, address, rating) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"
            }
            // name comes first here; ?8 is the id
            Self::UpdatePartner => {
                "UPDATE partners \
                 SET name = ?1, organization_type = ?2, ceo = ?3, email = ?4, \
                 phone = ?5, address = ?6, rating = ?7 \
                 WHERE id = ?8"
            }
        }
    }

    pub fn all() -> &'static [Self] {
        &[
            Self::ListPartners,
            Self::GetPartner,
            Self::CreatePartner,
            Self::UpdatePartner,
        ]
    }
}

//! Application use cases over the shared connection.

mod partner;
pub mod queries;

pub use partner::{
    partner_create, partner_get, partner_list, partner_update, PartnerCreateReq, PartnerDto,
    PartnerUpdateReq,
};

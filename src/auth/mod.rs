pub mod claims;

pub use claims::{
    DecodedClaims, COMPANY_ID_CLAIM_KEYS, DEFAULT_ROLE, EMAIL_CLAIM_KEYS, ROLE_CLAIM_KEYS,
    SUBJECT_CLAIM_KEYS, USER_CODE_CLAIM_KEYS,
};

pub(crate) mod checksum;
pub(crate) mod phonepe_service;

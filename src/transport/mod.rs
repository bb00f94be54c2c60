/// The v3 export dispatcher and file payload handling
pub mod export;
/// The legacy API dispatcher and its response classifier
pub mod legacy;

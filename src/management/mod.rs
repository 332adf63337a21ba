mod link_cache;
mod overrides;

pub use link_cache::LinkCacheManager;
pub use overrides::OverrideTable;

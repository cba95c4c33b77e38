pub mod keys;
pub mod kv {
    pub mod errors;
    pub mod file;
    pub mod memory;
    pub mod store;
}
pub mod cart {
    pub mod entity;
    pub mod repository;
}
pub mod sale {
    pub mod entity;
    pub mod id_allocator;
    pub mod repository;
}

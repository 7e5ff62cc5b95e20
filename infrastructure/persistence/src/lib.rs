pub mod db;
pub mod seed;
pub mod cart {
    pub mod entity;
    pub mod memory;
    pub mod repository;
}
pub mod category {
    pub mod entity;
    pub mod memory;
    pub mod repository;
}
pub mod favorite {
    pub mod entity;
    pub mod memory;
    pub mod repository;
}
pub mod order {
    pub mod entity;
    pub mod memory;
    pub mod repository;
}
pub mod product {
    pub mod entity;
    pub mod memory;
    pub mod repository;
}

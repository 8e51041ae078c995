pub mod db;
pub mod json_file;
pub mod alert {
    pub mod file_repository;
    pub mod repository;
}
pub mod item {
    pub mod entity;
    pub mod file_repository;
    pub mod repository;
}

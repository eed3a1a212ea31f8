pub mod ribbon;

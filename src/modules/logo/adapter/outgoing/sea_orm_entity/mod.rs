pub mod logos;

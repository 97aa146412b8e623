pub mod terminal_manager;

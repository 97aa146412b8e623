pub mod selection_state;

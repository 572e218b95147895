pub mod calendar;
pub mod event_modal;
pub mod event_panel;
pub mod jump_to_date;

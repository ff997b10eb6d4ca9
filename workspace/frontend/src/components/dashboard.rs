mod chart;
mod cycle_card;
mod footer;
mod info_cards;
mod insight_card;
mod quick_log;
mod view;

pub use view::Dashboard;

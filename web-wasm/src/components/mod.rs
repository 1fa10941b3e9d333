pub mod header;
pub mod loading_screen;
pub mod search_bar;
pub mod type_legend;
pub mod pokemon_card;
pub mod pagination;
pub mod pokemon_modal;

pub mod rank_model;

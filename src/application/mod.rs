// Application layer - Core algorithms, ports and use cases
pub mod air_quality_service;
pub mod aqi_repository;
pub mod food_log_repository;
pub mod food_log_service;
pub mod footprint_calculator;
pub mod history_analyzer;
pub mod motion_tracker;
pub mod station_matcher;
pub mod station_source;
pub mod tracking_service;

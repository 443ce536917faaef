// Air quality and carbon footprint engine
//
// - `domain/` - Coordinates, stations, fixes, reports and the fixed policy table
// - `application/` - Station matching, motion tracking, footprint and history use cases
// - `infrastructure/` - Configuration, WAQI station feed, in-memory history store
// - `presentation/` - JSON HTTP handlers
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

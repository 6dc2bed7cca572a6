//! Seed data for query tests.
//!
//! Mirrors the shape of the real flights dataset: an `airlines` lookup
//! table and a `flights` table referencing it, with `DEPARTURE_DELAY`
//! nullable.

pub const FLIGHTS_SCHEMA: &str = "
CREATE TABLE airlines (
    ID INTEGER PRIMARY KEY,
    AIRLINE TEXT NOT NULL
);
CREATE TABLE flights (
    ID INTEGER PRIMARY KEY,
    YEAR INTEGER NOT NULL,
    MONTH INTEGER NOT NULL,
    DAY INTEGER NOT NULL,
    AIRLINE INTEGER NOT NULL REFERENCES airlines(ID),
    ORIGIN_AIRPORT TEXT NOT NULL,
    DESTINATION_AIRPORT TEXT NOT NULL,
    DEPARTURE_DELAY INTEGER
);
";

// Seed notes:
// - 540 is the canonical known flight (delayed, 2015-01-01)
// - 541 has no recorded delay
// - 544 is one minute under the delay threshold, 545 exactly on it
pub const FLIGHTS_SEED: &str = "
INSERT INTO airlines (ID, AIRLINE) VALUES
    (1, 'United Air Lines Inc.'),
    (2, 'Delta Air Lines Inc.'),
    (3, 'American Airlines Inc.');
INSERT INTO flights (ID, YEAR, MONTH, DAY, AIRLINE, ORIGIN_AIRPORT, DESTINATION_AIRPORT, DEPARTURE_DELAY) VALUES
    (540, 2015, 1, 1, 1, 'SFO', 'JFK', 25),
    (541, 2015, 1, 1, 2, 'JFK', 'ATL', NULL),
    (542, 2015, 1, 1, 2, 'ATL', 'SFO', 5),
    (543, 2015, 1, 2, 1, 'SFO', 'LAX', 90),
    (544, 2015, 1, 2, 3, 'LAX', 'SEA', 19),
    (545, 2015, 2, 14, 3, 'SEA', 'SFO', 20);
";

//! Serialization round trips for `array-base` live under `tests/`.

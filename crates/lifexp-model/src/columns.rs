//! Column names used across the pipeline.

/// Demographic unit (e.g. `YR`).
pub const UNIT: &str = "unit";
/// Sex (`F`, `M`, `T`).
pub const SEX: &str = "sex";
/// Age band (e.g. `Y25`, `Y_LT1`).
pub const AGE: &str = "age";
/// Region code.
pub const REGION: &str = "region";
/// Observation year.
pub const YEAR: &str = "year";
/// Life expectancy in years.
pub const VALUE: &str = "value";

/// Normalized observation columns in output order.
pub const OBSERVATION_COLUMNS: [&str; 6] = [UNIT, SEX, AGE, REGION, YEAR, VALUE];

/// Fields encoded by the composite key column, in key order.
pub const KEY_FIELDS: [&str; 4] = [UNIT, SEX, AGE, REGION];

/// Header of the composite key column in the wide TSV export.
pub const COMPOSITE_KEY_COLUMN: &str = "unit,sex,age,geo\\time";

/// Delimiter between the fields of the composite key.
pub const KEY_DELIMITER: char = ',';

// JSON record fields.
pub const JSON_COUNTRY: &str = "country";
pub const JSON_LIFE_EXPECTANCY: &str = "life_expectancy";
pub const JSON_FLAG: &str = "flag";
pub const JSON_FLAG_DETAIL: &str = "flag_detail";

//! Sample instrument list: four NIFTY weekly option contracts

/// NFO option contracts as listed in the Kite instrument dump
pub const SAMPLE_INSTRUMENTS_JSON: &str = r#"
[
    {"symbol": "NIFTY2610625300CE", "instrument_token": 10350338, "exchange_token": 40431},
    {"symbol": "NIFTY2610625300PE", "instrument_token": 10350594, "exchange_token": 40432},
    {"symbol": "NIFTY2610625350CE", "instrument_token": 10350850, "exchange_token": 40433},
    {"symbol": "NIFTY2610625350PE", "instrument_token": 10351106, "exchange_token": 40434}
]
"#;

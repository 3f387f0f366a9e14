#![allow(dead_code)]
use chrono::NaiveDate;
use station_climate_api::config::{Config, LoggingConfig, ServerConfig, StoreConfig};
use station_climate_api::domain::{Observation, Station};

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn test_config(url: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            enable_cors: false,
        },
        store: StoreConfig {
            url: url.to_string(),
            max_connections: 2,
            acquire_timeout_secs: 5,
            read_only: true,
        },
        logging: LoggingConfig::default(),
    }
}

pub fn stations() -> Vec<Station> {
    vec![
        Station {
            id: 1,
            code: "USC00519397".to_string(),
            name: "WAIKIKI 717.2, HI US".to_string(),
            latitude: 21.2716,
            longitude: -157.8168,
            elevation: 3.0,
        },
        Station {
            id: 2,
            code: "USC00513117".to_string(),
            name: "KANEOHE 838.1, HI US".to_string(),
            latitude: 21.4234,
            longitude: -157.8015,
            elevation: 14.6,
        },
    ]
}

/// Rows in insertion order; dates deliberately not sorted
pub fn observations() -> Vec<Observation> {
    vec![
        Observation::new("USC00519397", day("2016-08-01"), Some(0.3), Some(65.0)),
        Observation::new("USC00519397", day("2017-08-20"), Some(1.2), Some(90.0)),
        Observation::new("USC00513117", day("2017-08-01"), Some(0.0), Some(70.0)),
        Observation::new("USC00513117", day("2017-08-22"), None, None),
        Observation::new("USC00519397", day("2017-08-10"), Some(0.5), Some(80.0)),
        Observation::new("USC00519397", day("2017-08-23"), Some(0.0), Some(81.0)),
    ]
}

/// One predefined vehicle offered for selection. Identity is the position
/// in the preset list; entries are built once at startup and never change.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleSpec {
    pub name: String,
    pub country: String,
    pub brand: String,
    pub model: String,
    pub battery_kwh: f64,
    pub range_km: f64,
    pub torque_nm: f64,
    pub top_speed_kmh: f64,
    pub seats: f64,
    pub drivetrain: String,
    pub body_type: String,
    pub age_years: f64,
    pub odometer_km: f64,
}

pub fn presets() -> Vec<VehicleSpec> {
    vec![
        VehicleSpec {
            name: "Tesla Model 3 – Finlandia".to_string(),
            country: "Finland".to_string(),
            brand: "TESLA".to_string(),
            model: "MODEL 3 LONG RANGE".to_string(),
            battery_kwh: 75.0,
            range_km: 500.0,
            torque_nm: 450.0,
            top_speed_kmh: 233.0,
            seats: 5.0,
            drivetrain: "AWD".to_string(),
            body_type: "Sedan".to_string(),
            age_years: 2.0,
            odometer_km: 30000.0,
        },
        VehicleSpec {
            name: "Volkswagen ID.7 – Alemania".to_string(),
            country: "Germany".to_string(),
            brand: "VOLKSWAGEN".to_string(),
            model: "ID.7 GTX".to_string(),
            battery_kwh: 86.0,
            range_km: 500.0,
            torque_nm: 560.0,
            top_speed_kmh: 180.0,
            seats: 5.0,
            drivetrain: "AWD".to_string(),
            body_type: "Liftback Sedan".to_string(),
            age_years: 2.0,
            odometer_km: 30915.0,
        },
        VehicleSpec {
            name: "Mercedes EQE – España".to_string(),
            country: "Spain".to_string(),
            brand: "MERCEDES-BENZ".to_string(),
            model: "EQE 350 4MATIC".to_string(),
            battery_kwh: 90.6,
            range_km: 515.0,
            torque_nm: 765.0,
            top_speed_kmh: 210.0,
            seats: 5.0,
            drivetrain: "AWD".to_string(),
            body_type: "Sedan".to_string(),
            age_years: 3.0,
            odometer_km: 38843.0,
        },
        VehicleSpec {
            name: "BYD Dolphin – Bélgica".to_string(),
            country: "Belgium".to_string(),
            brand: "BYD".to_string(),
            model: "DOLPHIN 60.4 KWH".to_string(),
            battery_kwh: 60.5,
            range_km: 350.0,
            torque_nm: 310.0,
            top_speed_kmh: 160.0,
            seats: 5.0,
            drivetrain: "FWD".to_string(),
            body_type: "Hatchback".to_string(),
            age_years: 3.0,
            odometer_km: 42368.0,
        },
        VehicleSpec {
            name: "Peugeot E-208 – Francia".to_string(),
            country: "France".to_string(),
            brand: "PEUGEOT".to_string(),
            model: "E-208 50 KWH".to_string(),
            battery_kwh: 46.3,
            range_km: 290.0,
            torque_nm: 260.0,
            top_speed_kmh: 150.0,
            seats: 5.0,
            drivetrain: "FWD".to_string(),
            body_type: "Hatchback".to_string(),
            age_years: 2.0,
            odometer_km: 38612.0,
        },
        VehicleSpec {
            name: "Audi Q4 E-tron – Alemania".to_string(),
            country: "Germany".to_string(),
            brand: "AUDI".to_string(),
            model: "Q4 E-TRON 45".to_string(),
            battery_kwh: 77.0,
            range_km: 420.0,
            torque_nm: 545.0,
            top_speed_kmh: 180.0,
            seats: 5.0,
            drivetrain: "RWD".to_string(),
            body_type: "SUV".to_string(),
            age_years: 1.0,
            odometer_km: 17916.0,
        },
    ]
}

use crate::api::PredictionRequest;
use crate::catalog::VehicleSpec;

/// The eleven editable form fields, in display order. Field identity lives
/// here rather than in presentation-layer lookups; every read and write of a
/// form value goes through this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Brand,
    Model,
    Battery,
    Range,
    Torque,
    TopSpeed,
    Seats,
    Drivetrain,
    Body,
    Age,
    Km,
}

impl FormField {
    pub const ALL: [FormField; 11] = [
        FormField::Brand,
        FormField::Model,
        FormField::Battery,
        FormField::Range,
        FormField::Torque,
        FormField::TopSpeed,
        FormField::Seats,
        FormField::Drivetrain,
        FormField::Body,
        FormField::Age,
        FormField::Km,
    ];

    pub fn label_key(self) -> &'static str {
        match self {
            FormField::Brand => "field_brand",
            FormField::Model => "field_model",
            FormField::Battery => "field_battery",
            FormField::Range => "field_range",
            FormField::Torque => "field_torque",
            FormField::TopSpeed => "field_topspeed",
            FormField::Seats => "field_seats",
            FormField::Drivetrain => "field_drivetrain",
            FormField::Body => "field_body",
            FormField::Age => "field_age",
            FormField::Km => "field_km",
        }
    }

    pub fn is_numeric(self) -> bool {
        !matches!(
            self,
            FormField::Brand | FormField::Model | FormField::Drivetrain | FormField::Body
        )
    }
}

/// Current form contents plus the selection state. The selected country is an
/// explicit field here, owned by the form, not a free-floating global; the
/// only thing that writes it is [`FormState::select`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub brand: String,
    pub model: String,
    pub battery: String,
    pub range: String,
    pub torque: String,
    pub top_speed: String,
    pub seats: String,
    pub drivetrain: String,
    pub body: String,
    pub age: String,
    pub km: String,

    pub selected_card: Option<usize>,
    pub selected_country: Option<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Brand => &self.brand,
            FormField::Model => &self.model,
            FormField::Battery => &self.battery,
            FormField::Range => &self.range,
            FormField::Torque => &self.torque,
            FormField::TopSpeed => &self.top_speed,
            FormField::Seats => &self.seats,
            FormField::Drivetrain => &self.drivetrain,
            FormField::Body => &self.body,
            FormField::Age => &self.age,
            FormField::Km => &self.km,
        }
    }

    pub fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Brand => &mut self.brand,
            FormField::Model => &mut self.model,
            FormField::Battery => &mut self.battery,
            FormField::Range => &mut self.range,
            FormField::Torque => &mut self.torque,
            FormField::TopSpeed => &mut self.top_speed,
            FormField::Seats => &mut self.seats,
            FormField::Drivetrain => &mut self.drivetrain,
            FormField::Body => &mut self.body,
            FormField::Age => &mut self.age,
            FormField::Km => &mut self.km,
        }
    }

    /// Autofills the form from catalog entry `index` and remembers its
    /// country. Overwrites any prior user edits, marks exactly this card as
    /// selected (last-write-wins, no confirmation). Out-of-range `index` is a
    /// programming error and panics on the slice access.
    pub fn select(&mut self, index: usize, catalog: &[VehicleSpec]) {
        let spec = &catalog[index];

        self.selected_country = Some(spec.country.clone());

        self.brand = spec.brand.clone();
        self.model = spec.model.clone();
        self.battery = fmt_num(spec.battery_kwh);
        self.range = fmt_num(spec.range_km);
        self.torque = fmt_num(spec.torque_nm);
        self.top_speed = fmt_num(spec.top_speed_kmh);
        self.seats = fmt_num(spec.seats);
        self.drivetrain = spec.drivetrain.clone();
        self.body = spec.body_type.clone();
        self.age = fmt_num(spec.age_years);
        self.km = fmt_num(spec.odometer_km);

        self.selected_card = Some(index);
    }

    /// Serializes the current field values into the wire payload. Numeric
    /// fields that fail to parse go out as NaN — there is no validation layer
    /// in front of the service. With no card ever selected, the fallback
    /// country goes out regardless of form contents.
    pub fn to_request(&self, fallback_country: &str) -> PredictionRequest {
        PredictionRequest {
            brand: self.brand.clone(),
            model: self.model.clone(),
            country: self
                .selected_country
                .clone()
                .unwrap_or_else(|| fallback_country.to_string()),
            battery_capacity_kwh: parse_num(&self.battery),
            electric_range_km: parse_num(&self.range),
            torque_nm: parse_num(&self.torque),
            top_speed_kmh: parse_num(&self.top_speed),
            seats: parse_num(&self.seats),
            drivetrain: self.drivetrain.clone(),
            car_body_type: self.body.clone(),
            age_years: parse_num(&self.age),
            km: parse_num(&self.km),
        }
    }
}

fn fmt_num(value: f64) -> String {
    format!("{}", value)
}

fn parse_num(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::presets;

    #[test]
    fn test_select_copies_all_fields() {
        let catalog = presets();
        let mut form = FormState::new();
        form.select(0, &catalog);

        assert_eq!(form.brand, "TESLA");
        assert_eq!(form.model, "MODEL 3 LONG RANGE");
        assert_eq!(form.battery, "75");
        assert_eq!(form.range, "500");
        assert_eq!(form.torque, "450");
        assert_eq!(form.top_speed, "233");
        assert_eq!(form.seats, "5");
        assert_eq!(form.drivetrain, "AWD");
        assert_eq!(form.body, "Sedan");
        assert_eq!(form.age, "2");
        assert_eq!(form.km, "30000");
        assert_eq!(form.selected_country.as_deref(), Some("Finland"));
        assert_eq!(form.selected_card, Some(0));
    }

    #[test]
    fn test_select_keeps_fractional_values() {
        let catalog = presets();
        let mut form = FormState::new();
        form.select(2, &catalog);
        assert_eq!(form.battery, "90.6");
    }

    #[test]
    fn test_select_is_last_write_wins() {
        let catalog = presets();
        let mut form = FormState::new();
        form.select(0, &catalog);
        form.select(1, &catalog);

        assert_eq!(form.selected_card, Some(1));
        assert_eq!(form.selected_country.as_deref(), Some("Germany"));
        assert_eq!(form.brand, "VOLKSWAGEN");
    }

    #[test]
    fn test_select_overwrites_user_edits() {
        let catalog = presets();
        let mut form = FormState::new();
        form.select(0, &catalog);
        form.battery = "999".to_string();
        form.select(0, &catalog);
        assert_eq!(form.battery, "75");
    }

    #[test]
    fn test_request_without_selection_uses_fallback_country() {
        let mut form = FormState::new();
        form.brand = "BYD".to_string();
        form.battery = "60.5".to_string();

        let req = form.to_request("Spain");
        assert_eq!(req.country, "Spain");
        assert_eq!(req.brand, "BYD");
    }

    #[test]
    fn test_request_from_unedited_first_preset() {
        let catalog = presets();
        let mut form = FormState::new();
        form.select(0, &catalog);

        let req = form.to_request("Spain");
        assert_eq!(req.country, "Finland");
        assert_eq!(req.battery_capacity_kwh, 75.0);
        assert_eq!(req.electric_range_km, 500.0);
        assert_eq!(req.torque_nm, 450.0);
        assert_eq!(req.top_speed_kmh, 233.0);
        assert_eq!(req.seats, 5.0);
        assert_eq!(req.drivetrain, "AWD");
        assert_eq!(req.car_body_type, "Sedan");
        assert_eq!(req.age_years, 2.0);
        assert_eq!(req.km, 30000.0);
    }

    #[test]
    fn test_unparseable_numeric_input_becomes_nan() {
        let mut form = FormState::new();
        form.seats = "five".to_string();
        form.km = "".to_string();

        let req = form.to_request("Spain");
        assert!(req.seats.is_nan());
        assert!(req.km.is_nan());
    }

    #[test]
    fn test_field_access_roundtrip() {
        let mut form = FormState::new();
        for field in FormField::ALL {
            form.value_mut(field).push_str("x");
        }
        for field in FormField::ALL {
            assert_eq!(form.value(field), "x");
        }
    }

    #[test]
    fn test_numeric_field_classification() {
        assert!(FormField::Battery.is_numeric());
        assert!(FormField::Km.is_numeric());
        assert!(!FormField::Brand.is_numeric());
        assert!(!FormField::Drivetrain.is_numeric());
        assert!(!FormField::Body.is_numeric());
    }

    #[test]
    #[should_panic]
    fn test_select_out_of_range_panics() {
        let catalog = presets();
        let mut form = FormState::new();
        form.select(catalog.len(), &catalog);
    }
}

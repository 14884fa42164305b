use crate::config::Language;

pub fn tr(key: &str, lang: &Language) -> String {
    match lang {
        Language::English => match key {
            // Tabs
            "tab_predict" => "PREDICT",
            "tab_set" => "SETTINGS",

            // Predict screen
            "cards_title" => "PRESET MODELS",
            "form_title" => "VEHICLE DETAILS",
            "results_title" => "ESTIMATED PRICES",
            "no_results" => "No estimate yet",
            "alert_predict" => "Prediction request failed",
            "alert_dismiss" => "Press ENTER to continue",

            // Form fields
            "field_brand" => "Brand",
            "field_model" => "Model",
            "field_battery" => "Battery (kWh)",
            "field_range" => "Range (km)",
            "field_torque" => "Torque (Nm)",
            "field_topspeed" => "Top speed (km/h)",
            "field_seats" => "Seats",
            "field_drivetrain" => "Drivetrain",
            "field_body" => "Body type",
            "field_age" => "Age (years)",
            "field_km" => "Odometer (km)",

            // Footer
            "footer_sending" => "SENDING...",
            "footer_idle" => "READY",
            "footer_keys_cards" => "↑/↓: Pick | ENTER: Autofill | →: Form | F5: Predict | Q: Quit",
            "footer_keys_form" => "↑/↓: Field | ENTER: Edit | ←: Models | F5: Predict | Q: Quit",
            "footer_keys_edit" => "Type to edit | ENTER/ESC: Done",
            "footer_keys_settings" => "↑/↓: Select | ENTER: Edit | ←/→: Change",

            // Settings
            "settings_title" => "CONFIGURATION TERMINAL",
            "cat_system" => "SYSTEM",
            "cat_connection" => "CONNECTION",
            "lang" => "Language",
            "fallback_country" => "Fallback country",
            "auto_save" => "Auto save",
            "logging" => "Log to file",
            "tick_rate" => "Tick rate (ms)",
            "api_url" => "API base URL",
            "cookie_file" => "Cookie file",

            _ => key,
        }
        .to_string(),

        Language::Spanish => match key {
            // Pestañas
            "tab_predict" => "PREDICCIÓN",
            "tab_set" => "AJUSTES",

            // Pantalla de predicción
            "cards_title" => "MODELOS PREDEFINIDOS",
            "form_title" => "DATOS DEL VEHÍCULO",
            "results_title" => "PRECIOS ESTIMADOS",
            "no_results" => "Sin estimación todavía",
            "alert_predict" => "Error al realizar la predicción",
            "alert_dismiss" => "Pulsa ENTER para continuar",

            // Campos del formulario
            "field_brand" => "Marca",
            "field_model" => "Modelo",
            "field_battery" => "Batería (kWh)",
            "field_range" => "Autonomía (km)",
            "field_torque" => "Par (Nm)",
            "field_topspeed" => "Vel. máx (km/h)",
            "field_seats" => "Plazas",
            "field_drivetrain" => "Tracción",
            "field_body" => "Carrocería",
            "field_age" => "Antigüedad (años)",
            "field_km" => "Kilometraje (km)",

            // Pie
            "footer_sending" => "ENVIANDO...",
            "footer_idle" => "LISTO",
            "footer_keys_cards" => "↑/↓: Elegir | ENTER: Rellenar | →: Formulario | F5: Predecir | Q: Salir",
            "footer_keys_form" => "↑/↓: Campo | ENTER: Editar | ←: Modelos | F5: Predecir | Q: Salir",
            "footer_keys_edit" => "Escribe para editar | ENTER/ESC: Hecho",
            "footer_keys_settings" => "↑/↓: Elegir | ENTER: Editar | ←/→: Cambiar",

            // Ajustes
            "settings_title" => "TERMINAL DE CONFIGURACIÓN",
            "cat_system" => "SISTEMA",
            "cat_connection" => "CONEXIÓN",
            "lang" => "Idioma",
            "fallback_country" => "País por defecto",
            "auto_save" => "Autoguardado",
            "logging" => "Registro a fichero",
            "tick_rate" => "Frecuencia (ms)",
            "api_url" => "URL del API",
            "cookie_file" => "Fichero de cookies",

            _ => key,
        }
        .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys_translate_in_both_languages() {
        for key in ["tab_predict", "field_brand", "alert_predict", "results_title"] {
            let en = tr(key, &Language::English);
            let es = tr(key, &Language::Spanish);
            assert_ne!(en, key, "missing English entry for {key}");
            assert_ne!(es, key, "missing Spanish entry for {key}");
        }
    }

    #[test]
    fn test_unknown_key_falls_through() {
        assert_eq!(tr("nonexistent_key", &Language::English), "nonexistent_key");
    }
}

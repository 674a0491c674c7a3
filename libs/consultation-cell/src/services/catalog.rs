//! Predefined lab test types offered when recording a consultation.

use crate::models::LabTestType;

const fn test(id: &'static str, name: &'static str, category: &'static str, description: &'static str) -> LabTestType {
    LabTestType {
        id,
        name,
        category,
        description,
    }
}

pub const CATEGORIES: [&str; 10] = [
    "Hematología",
    "Bioquímica",
    "Inmunología",
    "Microbiología",
    "Urología",
    "Endocrinología",
    "Gastroenterología",
    "Neumología",
    "Cardiología",
    "Oncología",
];

pub const LAB_TEST_TYPES: [LabTestType; 34] = [
    // Blood work
    test("hemograma_completo", "Hemograma Completo", "Hematología", "Conteo de células sanguíneas completo"),
    test("perfil_lipidico", "Perfil Lipídico", "Bioquímica", "Colesterol total, HDL, LDL, triglicéridos"),
    test("glucosa_ayunas", "Glucosa en Ayunas", "Bioquímica", "Medición de glucosa en sangre"),
    test("hemoglobina_glicosilada", "Hemoglobina Glicosilada (HbA1c)", "Bioquímica", "Control de diabetes a largo plazo"),
    test("funcion_hepatica", "Función Hepática", "Bioquímica", "TGO, TGP, bilirrubinas, albúmina"),
    test("funcion_renal", "Función Renal", "Bioquímica", "Creatinina, urea, ácido úrico"),
    test("electrolitos", "Electrolitos", "Bioquímica", "Sodio, potasio, cloro, CO2"),
    test("proteina_c_reactiva", "Proteína C Reactiva", "Inmunología", "Marcador de inflamación"),
    test("velocidad_sedimentacion", "Velocidad de Sedimentación (VSG)", "Hematología", "Indicador de inflamación"),
    test("tiroides_tsh", "TSH (Hormona Estimulante del Tiroides)", "Endocrinología", "Función tiroidea"),
    test("tiroides_t3_t4", "T3 y T4 Libre", "Endocrinología", "Hormonas tiroideas"),
    test("vitamina_d", "Vitamina D (25-OH)", "Bioquímica", "Niveles de vitamina D"),
    test("vitamina_b12", "Vitamina B12", "Bioquímica", "Niveles de vitamina B12"),
    test("acido_folico", "Ácido Fólico", "Bioquímica", "Niveles de folato"),
    test("hierro_ferritina", "Hierro y Ferritina", "Hematología", "Reservas de hierro"),
    // Urine
    test("examen_general_orina", "Examen General de Orina", "Urología", "Análisis físico, químico y microscópico"),
    test("urocultivo", "Urocultivo", "Microbiología", "Cultivo para detectar infecciones urinarias"),
    test("microalbuminuria", "Microalbuminuria", "Urología", "Detección temprana de daño renal"),
    // Stool
    test("coproparasitoscopico", "Coproparasitoscópico", "Microbiología", "Detección de parásitos en heces"),
    test("coprocultivo", "Coprocultivo", "Microbiología", "Cultivo de bacterias en heces"),
    test("sangre_oculta_heces", "Sangre Oculta en Heces", "Gastroenterología", "Detección de sangrado gastrointestinal"),
    // Cultures
    test("cultivo_garganta", "Cultivo de Garganta", "Microbiología", "Detección de infecciones en garganta"),
    test("cultivo_herida", "Cultivo de Herida", "Microbiología", "Identificación de microorganismos en heridas"),
    test("cultivo_secrecion", "Cultivo de Secreción", "Microbiología", "Análisis de secreciones corporales"),
    // Serology
    test("hepatitis_b_antigeno", "Antígeno de Superficie Hepatitis B", "Inmunología", "Detección de hepatitis B"),
    test("hepatitis_c_anticuerpos", "Anticuerpos Hepatitis C", "Inmunología", "Detección de hepatitis C"),
    test("vih_elisa", "VIH (ELISA)", "Inmunología", "Detección de anticuerpos VIH"),
    test("vdrl", "VDRL", "Inmunología", "Detección de sífilis"),
    test("torch", "TORCH", "Inmunología", "Toxoplasma, Rubéola, CMV, Herpes"),
    test("marcadores_tumorales", "Marcadores Tumorales", "Oncología", "PSA, CEA, CA 125, etc."),
    // Specialized
    test("gasometria_arterial", "Gasometría Arterial", "Neumología", "Análisis de gases en sangre arterial"),
    test("tiempo_coagulacion", "Tiempo de Coagulación", "Hematología", "TP, TTP, INR"),
    test("prueba_esfuerzo", "Prueba de Esfuerzo", "Cardiología", "Evaluación cardiovascular"),
    test("holter_24h", "Holter 24 Horas", "Cardiología", "Monitoreo cardíaco continuo"),
];

pub fn all() -> &'static [LabTestType] {
    &LAB_TEST_TYPES
}

pub fn find(id: &str) -> Option<&'static LabTestType> {
    LAB_TEST_TYPES.iter().find(|test| test.id == id)
}

/// Exact category match.
pub fn by_category(category: &str) -> Vec<&'static LabTestType> {
    LAB_TEST_TYPES
        .iter()
        .filter(|test| test.category == category)
        .collect()
}

/// Case-insensitive substring search over name and description.
pub fn search(term: &str) -> Vec<&'static LabTestType> {
    query(None, Some(term))
}

/// Applies the optional category and search filters in turn.
pub fn query(category: Option<&str>, term: Option<&str>) -> Vec<&'static LabTestType> {
    let by_category = category.map(str::trim).filter(|c| !c.is_empty());
    let term = term.map(|t| t.trim().to_lowercase()).filter(|t| !t.is_empty());

    LAB_TEST_TYPES
        .iter()
        .filter(|test| by_category.map_or(true, |c| test.category == c))
        .filter(|test| {
            term.as_deref().map_or(true, |t| {
                test.name.to_lowercase().contains(t) || test.description.to_lowercase().contains(t)
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_test_belongs_to_a_known_category() {
        assert_eq!(all().len(), 34);
        for test in all() {
            assert!(CATEGORIES.contains(&test.category), "{} has unknown category", test.id);
        }
        for category in CATEGORIES {
            assert!(!by_category(category).is_empty(), "{} is empty", category);
        }
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<_> = all().iter().map(|test| test.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 34);
    }

    #[test]
    fn category_match_is_exact() {
        assert_eq!(by_category("Cardiología").len(), 2);
        assert!(by_category("cardiología").is_empty());
    }

    #[test]
    fn search_covers_name_and_description() {
        assert_eq!(search("HEMOGRAMA")[0].id, "hemograma_completo");
        assert!(search("triglicéridos").iter().any(|test| test.id == "perfil_lipidico"));
        assert_eq!(search("  ").len(), all().len());
        assert_eq!(find("vdrl").map(|test| test.name), Some("VDRL"));
    }

    #[test]
    fn query_combines_filters() {
        let results = query(Some("Microbiología"), Some("cultivo"));
        assert_eq!(results.len(), 5);
        assert_eq!(query(None, None).len(), 34);
        assert_eq!(query(Some(""), Some("  ")).len(), 34);
    }
}

//! Localized user-facing strings.
//!
//! The dashboard never shows a raw error cause to the user. Every failure
//! maps to a catalog entry in the active language and the cause itself goes
//! to the logs.

use feedback_core::Language;

use crate::error::AnalysisError;

/// The complete set of user-facing strings for one language.
///
/// Fields ending in `_title` label report sections; the `error_*` fields
/// are banner texts keyed by the failure taxonomy.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    pub title: &'static str,
    pub analyze: &'static str,
    pub refresh: &'static str,
    pub loading: &'static str,
    pub error_title: &'static str,
    pub error_source: &'static str,
    pub error_no_data: &'static str,
    pub error_date_range: &'static str,
    pub error_enrichment: &'static str,
    /// Banner for a failed suggestions/highlights refresh after a language
    /// change. The previously displayed entries stay on screen.
    pub error_suggestions: &'static str,
    pub error_busy: &'static str,
    pub error_unknown: &'static str,
    pub nps_title: &'static str,
    pub csat_title: &'static str,
    pub sentiment_title: &'static str,
    pub suggestions_title: &'static str,
    pub highlights_title: &'static str,
    pub promoters: &'static str,
    pub passives: &'static str,
    pub detractors: &'static str,
    pub positive: &'static str,
    pub neutral: &'static str,
    pub negative: &'static str,
    pub csat_service: &'static str,
    pub csat_delivery: &'static str,
    pub csat_platform: &'static str,
}

const ES: Catalog = Catalog {
    title: "Panel de Opiniones de Clientes",
    analyze: "Analizar",
    refresh: "Actualizar",
    loading: "Analizando...",
    error_title: "Error",
    error_source: "No se pudo obtener o procesar la hoja de cálculo. Verifica la URL y los permisos de acceso.",
    error_no_data: "No se encontraron respuestas en el rango de fechas seleccionado.",
    error_date_range: "La fecha de inicio no puede ser posterior a la fecha de fin.",
    error_enrichment: "El análisis con IA falló. Inténtalo de nuevo más tarde.",
    error_suggestions: "No se pudieron actualizar las sugerencias.",
    error_busy: "Ya hay un análisis en curso.",
    error_unknown: "Ocurrió un error inesperado.",
    nps_title: "NPS (Net Promoter Score)",
    csat_title: "Satisfacción del Cliente (CSAT)",
    sentiment_title: "Análisis de Sentimiento",
    suggestions_title: "Sugerencias de Mejora",
    highlights_title: "Lo Que Hicimos Bien",
    promoters: "Promotores",
    passives: "Pasivos",
    detractors: "Detractores",
    positive: "Positivo",
    neutral: "Neutral",
    negative: "Negativo",
    csat_service: "Atención al cliente",
    csat_delivery: "Entrega",
    csat_platform: "Plataforma",
};

const PT: Catalog = Catalog {
    title: "Painel de Opiniões de Clientes",
    analyze: "Analisar",
    refresh: "Atualizar",
    loading: "Analisando...",
    error_title: "Erro",
    error_source: "Não foi possível obter ou processar a planilha. Verifique a URL e as permissões de acesso.",
    error_no_data: "Nenhuma resposta encontrada no período selecionado.",
    error_date_range: "A data de início não pode ser posterior à data de término.",
    error_enrichment: "A análise com IA falhou. Tente novamente mais tarde.",
    error_suggestions: "Não foi possível atualizar as sugestões.",
    error_busy: "Já existe uma análise em andamento.",
    error_unknown: "Ocorreu um erro inesperado.",
    nps_title: "NPS (Net Promoter Score)",
    csat_title: "Satisfação do Cliente (CSAT)",
    sentiment_title: "Análise de Sentimento",
    suggestions_title: "Sugestões de Melhoria",
    highlights_title: "O Que Fizemos Bem",
    promoters: "Promotores",
    passives: "Passivos",
    detractors: "Detratores",
    positive: "Positivo",
    neutral: "Neutro",
    negative: "Negativo",
    csat_service: "Atendimento ao cliente",
    csat_delivery: "Entrega",
    csat_platform: "Plataforma",
};

impl Catalog {
    /// Catalog for the given language.
    pub fn for_language(language: Language) -> &'static Catalog {
        match language {
            Language::Es => &ES,
            Language::Pt => &PT,
        }
    }
}

/// Maps an analysis failure to the banner text shown to the user.
pub fn error_banner(error: &AnalysisError, language: Language) -> &'static str {
    let catalog = Catalog::for_language(language);
    match error {
        AnalysisError::Source(_) => catalog.error_source,
        AnalysisError::NoData => catalog.error_no_data,
        AnalysisError::DateRange => catalog.error_date_range,
        AnalysisError::Enrichment(_) => catalog.error_enrichment,
        AnalysisError::Busy => catalog.error_busy,
        AnalysisError::Unknown(_) => catalog.error_unknown,
    }
}

/// Banner for a failed suggestions/highlights refresh after a language
/// change.
pub fn refresh_banner(language: Language) -> &'static str {
    Catalog::for_language(language).error_suggestions
}

/// Label for the analysis trigger. The label flips from analyze to refresh
/// once a load has succeeded.
pub fn action_label(data_loaded: bool, language: Language) -> &'static str {
    let catalog = Catalog::for_language(language);
    if data_loaded {
        catalog.refresh
    } else {
        catalog.analyze
    }
}

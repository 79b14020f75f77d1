//! Canned summary content. The endpoint performs no inference; these
//! templates are the placeholder standing where a real model server would go.

/// Label reported in `modelInfo.architecture`.
pub const ARCHITECTURE: &str = "Custom Dual-Decoder Transformer";

/// Citation list returned with every summary, in this order.
pub const SOURCES: [&str; 3] = [
    "American Medical Association Guidelines",
    "National Institutes of Health Clinical Guidelines",
    "Peer-reviewed medical literature database",
];

pub fn patient_summary(query: &str) -> String {
    format!(
        "Based on your question about \"{query}\", here's what you should know:

This is a patient-friendly explanation of your medical query. The information provided is designed to be easy to understand while maintaining accuracy.

Key points:
• Simplified medical terminology
• Clear explanations of symptoms and conditions
• Practical lifestyle recommendations
• When to seek professional medical help

Remember to consult with healthcare professionals for personalized medical advice."
    )
}

pub fn clinician_summary(query: &str) -> String {
    format!(
        "Clinical Assessment: Medical Query Analysis

Patient presents with inquiry regarding \"{query}\". Based on current medical literature and clinical guidelines:

CLINICAL EVALUATION:
- Comprehensive symptom assessment required
- Differential diagnosis considerations
- Risk factor evaluation
- Comorbidity screening

DIAGNOSTIC APPROACH:
1. History and Physical Examination
2. Laboratory investigations as indicated
3. Imaging studies if clinically warranted
4. Specialist consultation if needed

MANAGEMENT STRATEGY:
- Evidence-based treatment protocols
- Patient education and counseling
- Follow-up planning
- Monitoring and reassessment

References: Current medical guidelines and peer-reviewed literature"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_summaries_quote_the_query_verbatim() {
        let query = "chest pain when climbing stairs";
        assert!(patient_summary(query).contains(query));
        assert!(clinician_summary(query).contains(query));
    }

    #[test]
    fn source_list_is_fixed() {
        assert_eq!(SOURCES.len(), 3);
        assert_eq!(SOURCES[0], "American Medical Association Guidelines");
    }
}

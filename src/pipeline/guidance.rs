//! Reply guidance blocks injected into the drafting prompt.
//!
//! One fixed block per request type.

use crate::pipeline::types::RequestType;

const TECHNICAL_GUIDANCE: &str = "
🎯 TIPO RICHIESTA RILEVATO: TECNICA
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
Linee guida per la risposta:
- Rispondi in modo CHIARO e BREVE
- Fornisci l'informazione richiesta direttamente
- Non eccedere in empatia o moralizzazione
- Evita lunghe introduzioni emotive

📖 REGOLA DOTTRINALE:
Se il contenuto richiesto è dottrinale o canonico generale
e NON coinvolge una situazione personale o discernimento,
SPIEGA direttamente l'insegnamento della Chiesa.
NON rimandare al sacerdote per domande informative.
Il rinvio è riservato SOLO ai casi di discernimento personale.
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

const PASTORAL_GUIDANCE: &str = "
🎯 TIPO RICHIESTA RILEVATO: PASTORALE
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
Linee guida per la risposta:
- Rispondi in modo ACCOGLIENTE e PERSONALE
- Riconosci la situazione/sentimento espresso
- Accompagna la persona, non giudicare
- Non fermarti solo alla norma
- Invita al dialogo personale se opportuno
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

const MIXED_GUIDANCE: &str = "
🎯 TIPO RICHIESTA RILEVATO: MISTA
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
Linee guida per la risposta:
- Rispondi TECNICAMENTE (chiarezza) ma con TONO pastorale
- Non fermarti alla sola regola
- Non scivolare nel permissivismo
- Bilancia informazione e accoglienza
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

const DOCTRINAL_GUIDANCE: &str = "
🎯 TIPO RICHIESTA RILEVATO: DOTTRINALE
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
Linee guida per la risposta:
- RISPONDI DIRETTAMENTE alle domande di fede
- Spiega la dottrina in modo chiaro e accessibile
- Usa fonti: Catechismo, Magistero, Scrittura
- NON rimandare al sacerdote per domande informative

📖 REGOLA DOTTRINALE:
Questa è una richiesta di SPIEGAZIONE dottrinale generale.
✅ DEVI: Spiegare l'insegnamento della Chiesa
✅ DEVI: Essere chiaro, fedele, informativo
❌ NON: Rimandare al sacerdote per domande teoriche
❌ NON: Evitare di rispondere per \"prudenza\"

Il rinvio al sacerdote è riservato SOLO a:
- Situazioni personali concrete
- Discernimento su stati di vita
- Accompagnamento spirituale individuale
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Guidance block for a request type.
pub fn guidance(request_type: RequestType) -> &'static str {
    match request_type {
        RequestType::Technical => TECHNICAL_GUIDANCE,
        RequestType::Pastoral => PASTORAL_GUIDANCE,
        RequestType::Mixed => MIXED_GUIDANCE,
        RequestType::Doctrinal => DOCTRINAL_GUIDANCE,
    }
}

//! Prompt generation module
//!
//! Builds the unification instruction sent to Gemini:
//! - build_analysis_block: numbered, delimited analysis documents
//! - build_unify_prompt: full prompt for the selected locale
//!
//! The merge intelligence lives entirely in these instructions; nothing in
//! this crate interprets the clauses itself.

use crate::locale::Locale;

/// Format the analysis documents as a numbered, `---`-delimited block.
///
/// Labels are 1-based and follow the input order, regardless of how the
/// texts were produced. The label is shared by both prompt templates.
pub fn build_analysis_block(analysis_texts: &[String]) -> String {
    analysis_texts
        .iter()
        .enumerate()
        .map(|(index, text)| {
            format!("Documento para Análise {}:\n---\n{}\n---\n", index + 1, text)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the full unification prompt for one run.
///
/// The base text is embedded verbatim between `---` markers; the analysis
/// texts are embedded via [`build_analysis_block`]. One of two fixed
/// templates is selected by locale.
pub fn build_unify_prompt(locale: Locale, base_text: &str, analysis_texts: &[String]) -> String {
    let analysis_block = build_analysis_block(analysis_texts);

    match locale {
        Locale::Pt => format!(
            r#"Você é um especialista em documentos regulatórios de telecomunicações no Brasil. Sua tarefa é analisar e unificar vários regulamentos de planos de voz em um único documento mestre. A linguagem deve ser formal, precisa e seguir os padrões regulatórios.

**Documento de Referência (Base):**
---
{base_text}
---

**Documentos para Análise:**
{analysis_block}

**Instruções Detalhadas:**
1.  **Estrutura e Formato:** Use a estrutura de cláusulas do Documento de Referência como guia (ex: OBJETIVO, CONDIÇÕES DA OFERTA, etc.). O output deve ser um documento completo e pronto para uso, não uma lista de diferenças.
2.  **Unificação de Cláusulas Comuns:** Para tópicos presentes em todos os documentos, crie uma única cláusula unificada. Esta cláusula deve ser a versão mais clara, completa e juridicamente robusta, combinando as informações de todos os inputs. Corrija rigorosamente a ortografia e a concordância verbal.
3.  **Incorporação de Cláusulas Não Comuns:** Se um documento de análise contiver uma cláusula importante que não está no documento base, incorpore-a na seção apropriada do novo documento unificado.
4.  **Consistência:** Mantenha um tom e terminologia consistentes em todo o documento.
5.  **Output Final:** O documento final deve incluir um campo para 'Local' e 'Data', e terminar com 'TELEFÔNICA BRASIL S.A.' em uma linha separada e centralizada. Não inclua comentários ou notas de rodapé, apenas o texto final do regulamento.

Comece a gerar o documento unificado agora."#
        ),
        Locale::En => format!(
            r#"You are an expert in Brazilian telecommunications regulatory documents. Your task is to analyze and merge several voice plan regulations into a single master document. The language must be formal, precise, and adhere to regulatory standards.

**Reference Document (Base):**
---
{base_text}
---

**Documents for Analysis:**
{analysis_block}

**Detailed Instructions:**
1.  **Structure and Format:** Use the clause structure from the Reference Document as a guide (e.g., OBJECTIVE, OFFER CONDITIONS, etc.). The output must be a complete, ready-to-use document, not a list of differences.
2.  **Unification of Common Clauses:** For topics present across all documents, create a single, unified clause. This clause should be the clearest, most complete, and legally robust version, combining information from all inputs. Rigorously correct spelling and grammar.
3.  **Incorporation of Uncommon Clauses:** If an analysis document contains an important clause not present in the base document, incorporate it into the appropriate section of the new unified document.
4.  **Consistency:** Maintain a consistent tone and terminology throughout the entire document.
5.  **Final Output:** The final document must include a field for 'Location' and 'Date', and end with 'TELEFÔNICA BRASIL S.A.' on a separate, centered line. Do not include comments or footnotes, only the final regulation text.

Begin generating the unified document now."#
        ),
    }
}

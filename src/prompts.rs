const REPORT_PROMPT_TEMPLATE: &str = "You are a senior market research analyst.\nWrite a professional executive summary answering the user's question.\nUse strict factual data from the search results below.\n\nUSER QUESTION: {query}\n\nSEARCH DATA:\n{search_data}";

pub fn report_prompt(query: &str, search_data: &str) -> String {
    REPORT_PROMPT_TEMPLATE
        .replace("{query}", query)
        .replace("{search_data}", search_data)
}

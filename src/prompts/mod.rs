pub mod enrichment_prompt;

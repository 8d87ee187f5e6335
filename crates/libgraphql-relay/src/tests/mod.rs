mod canonical_json_tests;
mod compiler_context_tests;

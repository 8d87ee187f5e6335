mod in_memory_codegen_directory;

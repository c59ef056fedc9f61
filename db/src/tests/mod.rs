mod in_memory_store_tests;

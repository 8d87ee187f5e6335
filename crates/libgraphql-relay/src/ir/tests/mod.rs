mod definition_json_tests;

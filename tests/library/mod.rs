mod generate_prompt_api_contract;

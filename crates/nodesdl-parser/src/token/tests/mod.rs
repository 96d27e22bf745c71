mod sdl_token_kind_tests;

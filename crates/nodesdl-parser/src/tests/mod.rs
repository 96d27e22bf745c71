mod round_trip_tests;
mod sdl_token_stream_tests;
mod utils;

pub mod model_registry;

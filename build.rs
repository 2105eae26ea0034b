fn main() {
    // Emits the ESP-IDF link/env configuration when building for the device;
    // harmless no-op on host builds where the SDK environment is absent.
    embuild::espidf::sysenv::output();
}

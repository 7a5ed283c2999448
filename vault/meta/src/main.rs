fn main() {
    multiversx_sc_meta_lib::cli_main::<debenture_vault::AbiProvider>();
}

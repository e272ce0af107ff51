use soroban_sdk::contracttype;

#[derive(Clone)]
#[contracttype]
pub(crate) enum DataKey {
    Admin,       // owner - set protocol fee, transfer ownership
    FutureAdmin, // pending owner

    TransferOwnershipDeadline,
}

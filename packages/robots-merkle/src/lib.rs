//! Allowlist membership proofs.
//!
//! Leaves are `keccak256(address)`. Every internal node hashes its two children
//! smaller-first, so a proof is just the list of siblings from leaf to root and
//! carries no left/right flags.

use sha3::{Digest, Keccak256};

pub type Hash = [u8; 32];

pub fn keccak256(data: &[u8]) -> Hash {
    Keccak256::digest(data).into()
}

pub fn leaf_hash(address: &str) -> Hash {
    keccak256(address.as_bytes())
}

/// Hash two nodes in ascending order
pub fn hash_pair(a: &Hash, b: &Hash) -> Hash {
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    let mut hasher = Keccak256::new();
    hasher.update(first);
    hasher.update(second);
    hasher.finalize().into()
}

/// Fold `proof` into `leaf` and compare the result against `root`
pub fn verify(root: &Hash, leaf: Hash, proof: &[Hash]) -> bool {
    let computed = proof
        .iter()
        .fold(leaf, |node, sibling| hash_pair(&node, sibling));
    &computed == root
}

pub fn verify_address(root: &Hash, address: &str, proof: &[Hash]) -> bool {
    verify(root, leaf_hash(address), proof)
}

/// Converts raw proof elements, `None` if any of them is not 32 bytes
pub fn to_hashes<'a, I>(elements: I) -> Option<Vec<Hash>>
where
    I: IntoIterator<Item = &'a [u8]>,
{
    elements
        .into_iter()
        .map(|bytes| Hash::try_from(bytes).ok())
        .collect()
}

/// Sorted-pair tree over a fixed set of leaves.
///
/// Leaves keep their insertion order. A node without a sibling is promoted to
/// the next layer as is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MerkleTree {
    layers: Vec<Vec<Hash>>,
}

impl MerkleTree {
    pub fn new(leaves: Vec<Hash>) -> Self {
        let mut layers = vec![leaves];
        loop {
            let current = &layers[layers.len() - 1];
            if current.len() <= 1 {
                break;
            }
            let next = current
                .chunks(2)
                .map(|pair| match pair {
                    [left, right] => hash_pair(left, right),
                    _ => pair[0],
                })
                .collect();
            layers.push(next);
        }
        MerkleTree { layers }
    }

    pub fn from_addresses<I, S>(addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(
            addresses
                .into_iter()
                .map(|address| leaf_hash(address.as_ref()))
                .collect(),
        )
    }

    /// `None` for an empty tree
    pub fn root(&self) -> Option<Hash> {
        self.layers.last().and_then(|layer| layer.first()).copied()
    }

    pub fn leaves(&self) -> &[Hash] {
        &self.layers[0]
    }

    /// Sibling path for the first occurrence of `leaf`
    pub fn proof(&self, leaf: &Hash) -> Option<Vec<Hash>> {
        let mut index = self.leaves().iter().position(|l| l == leaf)?;
        let mut proof = vec![];
        for layer in &self.layers[..self.layers.len() - 1] {
            let sibling = if index % 2 == 1 { index - 1 } else { index + 1 };
            if let Some(node) = layer.get(sibling) {
                proof.push(*node);
            }
            index /= 2;
        }
        Some(proof)
    }

    pub fn address_proof(&self, address: &str) -> Option<Vec<Hash>> {
        self.proof(&leaf_hash(address))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn members(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("stars1member{:04}", i)).collect()
    }

    #[test]
    fn keccak_of_empty_input() {
        assert_eq!(
            hex::encode(keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn pair_hash_ignores_operand_order() {
        let a = leaf_hash("alice");
        let b = leaf_hash("bob");
        assert_eq!(hash_pair(&a, &b), hash_pair(&b, &a));
        assert_ne!(hash_pair(&a, &b), hash_pair(&a, &a));
    }

    #[test]
    fn single_leaf_is_its_own_root() {
        let tree = MerkleTree::from_addresses(["alice"]);
        let root = tree.root().unwrap();
        assert_eq!(root, leaf_hash("alice"));

        let proof = tree.address_proof("alice").unwrap();
        assert!(proof.is_empty());
        assert!(verify_address(&root, "alice", &proof));
        assert!(!verify_address(&root, "bob", &proof));
    }

    #[test]
    fn empty_tree_has_no_root() {
        let tree = MerkleTree::new(vec![]);
        assert_eq!(tree.root(), None);
        assert_eq!(tree.address_proof("alice"), None);
    }

    #[test]
    fn every_member_verifies() {
        for n in 1..=17 {
            let addrs = members(n);
            let tree = MerkleTree::from_addresses(&addrs);
            let root = tree.root().unwrap();
            for addr in &addrs {
                let proof = tree.address_proof(addr).unwrap();
                assert!(verify_address(&root, addr, &proof), "{} of {}", addr, n);
            }
        }
    }

    #[test]
    fn odd_node_is_promoted() {
        let addrs = members(3);
        let tree = MerkleTree::from_addresses(&addrs);
        let leaves = tree.leaves();
        let expected = hash_pair(&hash_pair(&leaves[0], &leaves[1]), &leaves[2]);
        assert_eq!(tree.root().unwrap(), expected);
        assert_eq!(tree.address_proof(&addrs[2]).unwrap().len(), 1);
    }

    #[test]
    fn outsider_is_rejected() {
        let addrs = members(5);
        let tree = MerkleTree::from_addresses(&addrs);
        let root = tree.root().unwrap();

        assert_eq!(tree.address_proof("stars1outsider"), None);
        // borrowing a member's proof does not help
        let proof = tree.address_proof(&addrs[0]).unwrap();
        assert!(!verify_address(&root, "stars1outsider", &proof));
    }

    #[test]
    fn tampered_proof_is_rejected() {
        let addrs = members(8);
        let tree = MerkleTree::from_addresses(&addrs);
        let root = tree.root().unwrap();
        let proof = tree.address_proof(&addrs[3]).unwrap();

        for i in 0..proof.len() {
            let mut tampered = proof.clone();
            tampered[i][0] ^= 0x01;
            assert!(!verify_address(&root, &addrs[3], &tampered));
        }

        let truncated = &proof[..proof.len() - 1];
        assert!(!verify_address(&root, &addrs[3], truncated));

        let mut extended = proof.clone();
        extended.push(leaf_hash("extra"));
        assert!(!verify_address(&root, &addrs[3], &extended));
    }

    #[test]
    fn proof_for_old_root_fails_against_new_root() {
        let mut addrs = members(5);
        let old = MerkleTree::from_addresses(&addrs);
        addrs.push("stars1latecomer".to_string());
        addrs.push("stars1another".to_string());
        let new = MerkleTree::from_addresses(&addrs);

        let old_root = old.root().unwrap();
        let new_root = new.root().unwrap();
        assert_ne!(old_root, new_root);

        let stale = old.address_proof(&addrs[0]).unwrap();
        assert!(verify_address(&old_root, &addrs[0], &stale));
        assert!(!verify_address(&new_root, &addrs[0], &stale));

        let fresh = new.address_proof(&addrs[0]).unwrap();
        assert!(verify_address(&new_root, &addrs[0], &fresh));
    }

    #[test]
    fn converts_proof_elements() {
        let a = leaf_hash("a");
        let b = leaf_hash("b");
        let raw: Vec<Vec<u8>> = vec![a.to_vec(), b.to_vec()];
        assert_eq!(
            to_hashes(raw.iter().map(|e| e.as_slice())),
            Some(vec![a, b])
        );

        let short: Vec<Vec<u8>> = vec![a.to_vec(), vec![0u8; 31]];
        assert_eq!(to_hashes(short.iter().map(|e| e.as_slice())), None);
    }
}
